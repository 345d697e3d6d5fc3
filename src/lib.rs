#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod electrical;
pub mod errors;
pub mod mechanical;
#[cfg(feature = "plotting")]
pub mod plot;
pub mod profiles;
pub mod report;
pub mod structural;

pub use electrical::{
    BatteryRequirements, DEFAULT_MOTOR_EFFICIENCY, DEFAULT_NOMINAL_VOLTAGE, DEFAULT_SAFETY_FACTOR,
    ElectricalAnalyzer, PowerSystemAnalysis,
};
pub use errors::{GeometryError, JointInputError};
pub use mechanical::{JointRequirements, MechanicalAnalyzer, STANDARD_GRAVITY};
pub use structural::{
    CombinedStress, Material, SectionProperties, StrainState, StressState, TubeAnalysis,
    TubeAnalyzer, TubeLoading, TubeSection,
};
