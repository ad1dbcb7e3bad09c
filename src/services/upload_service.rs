use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::db::UploadRepository;
use crate::enums::{ Category, PricingMode };
use crate::error::{ AppError, Result };
use crate::reward::{ reward, RewardTier };

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUploadRequest {
    pub group_id: String,
    pub category: String,
    pub price: f64,
    pub pricing_mode: String,
    pub member_count: i32,
}

/// Result of a create call. A repeated `group_id` is not an error: the
/// caller gets the stored reward back and no second row is written.
#[derive(Debug, PartialEq)]
pub enum UploadOutcome {
    Created {
        id: Uuid,
        tier: RewardTier,
    },
    Duplicate {
        reward_vxum: i32,
    },
}

pub struct UploadService {
    upload_repo: Arc<UploadRepository>,
}

impl UploadService {
    pub fn new(upload_repo: Arc<UploadRepository>) -> Self {
        Self { upload_repo }
    }

    pub async fn create_upload(
        &self,
        uploader_id: &str,
        request: CreateUploadRequest
    ) -> Result<UploadOutcome> {
        validate(&request)?;

        if let Some(existing) = self.upload_repo.find_by_group_id(&request.group_id).await? {
            return Ok(UploadOutcome::Duplicate {
                reward_vxum: existing.reward_vxum,
            });
        }

        let tier = reward(request.member_count as u32);

        let listing = self.upload_repo.create(
            request.group_id,
            request.category,
            request.price,
            request.pricing_mode,
            request.member_count,
            tier,
            uploader_id.to_string()
        ).await?;

        Ok(UploadOutcome::Created {
            id: listing.id,
            tier,
        })
    }

    pub async fn list_uploads(&self, uploader_id: &str) -> Result<Vec<crate::db::entity::upload::Model>> {
        self.upload_repo.list_by_uploader(uploader_id, UPLOADS_WINDOW).await
    }
}

/// How many listings a single fetch returns.
const UPLOADS_WINDOW: u64 = 50;

fn is_valid_group_id(group_id: &str) -> bool {
    (6..=20).contains(&group_id.len()) && group_id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check every constraint and report all violations at once.
fn validate(request: &CreateUploadRequest) -> Result<()> {
    let mut violations: Vec<String> = Vec::new();

    if !is_valid_group_id(&request.group_id) {
        violations.push("Group ID must be 6-20 alphanumeric characters".to_string());
    }

    if let Err(AppError::Validation(message)) = Category::from_str(&request.category) {
        violations.push(message);
    }

    if !(50..=500).contains(&request.member_count) {
        violations.push("Member count must be between 50 and 500".to_string());
    }

    match PricingMode::from_str(&request.pricing_mode) {
        Ok(mode) => {
            let (min, max) = mode.price_bounds();
            if request.price < min || request.price > max {
                violations.push(match mode {
                    PricingMode::PerPerson => {
                        "Per-person price must be between $0.10 and $0.30".to_string()
                    }
                    PricingMode::PerGroup => {
                        "Per-group price must be between $0.10 and $150.00".to_string()
                    }
                });
            }
        }
        Err(AppError::Validation(message)) => violations.push(message),
        Err(_) => {}
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations.join(", ")))
    }
}
