//! Record schema: the ordered list of visit fields.
//!
//! The CSV header, field-addressed patches, validation and the free-text
//! search all read from the tables in this file, so adding a field means
//! adding it here and to `VisitRecord`, nowhere else.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Chain,
    SubChain,
    VenueName,
    VenueCity,
    OssOwnerName,
    Efood,
    TrainingOwner,
    VisitDate,
    NeedsFollowUp,
    FollowUp,
    StoreManager,
    Personnel,
    WoltsPickers,
    StaffsEngagement,
    StoreSize,
    StoreLayout,
    Internet,
    ContactCustomers,
    Devices,
    FirmwareUpdate,
    Problems,
    Status,
    AssignedTo,
    CreatedAt,
    Checkins,
}

/// Value domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    YesNo,
    Engagement,
    Date,
    Status,
    CheckIns,
}

impl Field {
    /// Every field, in CSV column order.
    pub const ALL: [Field; 26] = [
        Field::Id,
        Field::Chain,
        Field::SubChain,
        Field::VenueName,
        Field::VenueCity,
        Field::OssOwnerName,
        Field::Efood,
        Field::TrainingOwner,
        Field::VisitDate,
        Field::NeedsFollowUp,
        Field::FollowUp,
        Field::StoreManager,
        Field::Personnel,
        Field::WoltsPickers,
        Field::StaffsEngagement,
        Field::StoreSize,
        Field::StoreLayout,
        Field::Internet,
        Field::ContactCustomers,
        Field::Devices,
        Field::FirmwareUpdate,
        Field::Problems,
        Field::Status,
        Field::AssignedTo,
        Field::CreatedAt,
        Field::Checkins,
    ];

    /// Fields concatenated for the free-text query.
    pub const SEARCHABLE: [Field; 5] = [
        Field::VenueName,
        Field::VenueCity,
        Field::FollowUp,
        Field::Problems,
        Field::StoreManager,
    ];

    /// Fields a new visit cannot be saved without.
    pub const REQUIRED: [Field; 2] = [Field::Chain, Field::VenueName];

    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Chain => "chain",
            Field::SubChain => "subChain",
            Field::VenueName => "venueName",
            Field::VenueCity => "venueCity",
            Field::OssOwnerName => "ossOwnerName",
            Field::Efood => "efood",
            Field::TrainingOwner => "trainingOwner",
            Field::VisitDate => "visitDate",
            Field::NeedsFollowUp => "needsFollowUp",
            Field::FollowUp => "followUp",
            Field::StoreManager => "storeManager",
            Field::Personnel => "personnel",
            Field::WoltsPickers => "woltsPickers",
            Field::StaffsEngagement => "staffsEngagement",
            Field::StoreSize => "storeSize",
            Field::StoreLayout => "storeLayout",
            Field::Internet => "internet",
            Field::ContactCustomers => "contactCustomers",
            Field::Devices => "devices",
            Field::FirmwareUpdate => "firmwareUpdate",
            Field::Problems => "problems",
            Field::Status => "status",
            Field::AssignedTo => "assignedTo",
            Field::CreatedAt => "createdAt",
            Field::Checkins => "checkins",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Efood | Field::NeedsFollowUp | Field::ContactCustomers | Field::FirmwareUpdate => {
                FieldKind::YesNo
            }
            Field::StaffsEngagement => FieldKind::Engagement,
            Field::VisitDate | Field::CreatedAt => FieldKind::Date,
            Field::Status => FieldKind::Status,
            Field::Checkins => FieldKind::CheckIns,
            _ => FieldKind::Text,
        }
    }

    /// Exact column name first, then a case-insensitive match so that
    /// hand-edited headers like `VenueName` still line up.
    pub fn from_name(name: &str) -> Option<Field> {
        let name = name.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .or_else(|| {
                Field::ALL
                    .iter()
                    .copied()
                    .find(|f| f.name().eq_ignore_ascii_case(name))
            })
    }

    /// CSV header line: comma-joined names in column order.
    pub fn header() -> String {
        Field::ALL.map(Field::name).join(",")
    }
}

/// Free-text fields that accept dictated notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NoteField {
    Problems,
    #[value(name = "followUp", alias = "follow-up")]
    FollowUp,
}

impl NoteField {
    pub fn field(self) -> Field {
        match self {
            NoteField::Problems => Field::Problems,
            NoteField::FollowUp => Field::FollowUp,
        }
    }
}
