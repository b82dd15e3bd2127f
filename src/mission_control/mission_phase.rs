use strum_macros::{Display, EnumIter};

/// Flight phases in mission order. The derived ordering is the order of declaration,
/// which is the only order phases may be traversed in.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display, EnumIter)]
pub enum MissionPhase {
    #[strum(serialize = "Pre-Launch")]
    PreLaunch,
    #[strum(serialize = "Liftoff")]
    Liftoff,
    #[strum(serialize = "Max Q")]
    MaxQ,
    #[strum(serialize = "Stage Separation")]
    StageSeparation,
    #[strum(serialize = "Upper Stage Burn")]
    UpperStageBurn,
    #[strum(serialize = "Orbit Insertion")]
    OrbitInsertion,
    #[strum(serialize = "Mission Operations")]
    MissionOps,
    #[strum(serialize = "Orbital Adjustments")]
    OrbitalAdjustments,
    #[strum(serialize = "Deorbit")]
    Deorbit,
    #[strum(serialize = "Re-entry")]
    Reentry,
    #[strum(serialize = "Recovery")]
    Recovery,
    #[strum(serialize = "Post-Flight")]
    PostFlight,
}

impl MissionPhase {
    /// The phase directly following this one, `None` for [`MissionPhase::PostFlight`].
    pub fn next(self) -> Option<MissionPhase> {
        match self {
            MissionPhase::PreLaunch => Some(MissionPhase::Liftoff),
            MissionPhase::Liftoff => Some(MissionPhase::MaxQ),
            MissionPhase::MaxQ => Some(MissionPhase::StageSeparation),
            MissionPhase::StageSeparation => Some(MissionPhase::UpperStageBurn),
            MissionPhase::UpperStageBurn => Some(MissionPhase::OrbitInsertion),
            MissionPhase::OrbitInsertion => Some(MissionPhase::MissionOps),
            MissionPhase::MissionOps => Some(MissionPhase::OrbitalAdjustments),
            MissionPhase::OrbitalAdjustments => Some(MissionPhase::Deorbit),
            MissionPhase::Deorbit => Some(MissionPhase::Reentry),
            MissionPhase::Reentry => Some(MissionPhase::Recovery),
            MissionPhase::Recovery => Some(MissionPhase::PostFlight),
            MissionPhase::PostFlight => None,
        }
    }

    /// Reaching a terminal phase ends the control loop.
    pub fn is_terminal(self) -> bool { self.next().is_none() }
}
