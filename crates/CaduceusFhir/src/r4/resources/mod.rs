//! R4 resources and their backbone elements.

pub mod bundle;
pub use bundle::*;

pub mod care_team;
pub use care_team::*;

pub mod condition;
pub use condition::*;

pub mod medication_statement;
pub use medication_statement::*;

pub mod observation;
pub use observation::*;

pub mod patient;
pub use patient::*;
