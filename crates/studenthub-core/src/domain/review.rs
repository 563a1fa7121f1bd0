use serde::{Deserialize, Serialize};

use super::ItemId;
use crate::error::ApiError;

/// Review left by one user for another after a completed deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer_id: ItemId,
    pub reviewee_id: ItemId,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl Review {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// Build a review, rejecting out-of-range ratings and self-reviews.
    pub fn new(
        reviewer_id: ItemId,
        reviewee_id: ItemId,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let review = Self {
            reviewer_id,
            reviewee_id,
            rating,
            comment: comment.into(),
        };
        review.validate()?;
        Ok(review)
    }

    /// Fields are public, so anything about to be sent is checked again here.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating) {
            return Err(ApiError::InvalidInput(format!(
                "rating must be between {} and {}",
                Self::MIN_RATING,
                Self::MAX_RATING
            )));
        }
        if self.reviewer_id == self.reviewee_id {
            return Err(ApiError::InvalidInput(
                "users cannot review themselves".to_string(),
            ));
        }
        Ok(())
    }
}
