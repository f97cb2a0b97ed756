//! Entity invariant violations, rejected before the engine runs.

/// Errors that can occur while validating House of Quality records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("customer requirement {id}: importance {value} outside [1,5]")]
    ImportanceOutOfRange { id: String, value: u8 },

    #[error("technical requirement {id}: difficulty {value} outside [1,5]")]
    DifficultyOutOfRange { id: String, value: u8 },

    #[error("customer requirement {id}: competitor rating {value} outside [1,5]")]
    RatingOutOfRange { id: String, value: u8 },

    #[error("customer requirement {id}: {ratings} competitor ratings but only {competitors} competitors defined")]
    TooManyRatings {
        id: String,
        ratings: usize,
        competitors: usize,
    },

    #[error("relationship strength {value} is not one of 0, 1, 3, 9")]
    InvalidStrength { value: u8 },

    #[error("correlation value {value} outside [-2,2]")]
    InvalidCorrelation { value: i8 },

    #[error("technical requirement {id} cannot correlate with itself")]
    SelfCorrelation { id: String },

    #[error("duplicate relationship for customer {customer} and technical {technical}")]
    DuplicateRelationship { customer: String, technical: String },

    #[error("duplicate correlation for pair ({first}, {second})")]
    DuplicateCorrelation { first: String, second: String },

    #[error("relationship references unknown customer requirement {id}")]
    UnknownCustomerRequirement { id: String },

    #[error("record references unknown technical requirement {id}")]
    UnknownTechnicalRequirement { id: String },
}
