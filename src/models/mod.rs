pub mod checkin;
pub mod engagement;
pub mod field;
pub mod patch;
pub mod status;
pub mod team;
pub mod visit;
pub mod yes_no;

pub use checkin::{CheckIn, GeoPoint};
pub use engagement::Engagement;
pub use field::{Field, FieldKind, NoteField};
pub use patch::VisitPatch;
pub use status::{Status, StatusDef};
pub use team::TeamMember;
pub use visit::VisitRecord;
pub use yes_no::YesNo;
