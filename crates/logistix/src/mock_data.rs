//! Demo data loaded at startup when `DEMO_DATA` is enabled.

use chrono::Utc;
use logistix_auth::AuthError;
use logistix_core::auth::User;
use logistix_core::portal::generate_seed_portal;
use logistix_core::storage::RepositoryError;
use logistix_core::tracking::generate_seed_shipments;
use thiserror::Error;

use crate::state::AppState;

pub const DEMO_EMAIL: &str = "demo@unitaslogistix.com";
pub const DEMO_PASSWORD: &str = "logistix-demo";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to store demo data: {0}")]
    Repository(#[from] RepositoryError),
    #[error("failed to create demo account: {0}")]
    Auth(#[from] AuthError),
}

/// Seeds the tracking shipments and a demo customer with a populated dashboard.
pub async fn seed_demo_data(state: &AppState) -> Result<(), SeedError> {
    let seeds = generate_seed_shipments();
    let shipment_count = seeds.len();
    for seed in seeds {
        state.shipments.create_shipment(&seed.shipment).await?;
        for event in &seed.events {
            state.shipments.add_tracking_event(event).await?;
        }
    }

    let password_hash = state.auth.passwords.hash(DEMO_PASSWORD).await?;
    let user = User::new(
        DEMO_EMAIL,
        password_hash,
        "Demo",
        "Acme Imports Ltd",
        "+1 (555) 010-2030",
    )
    .with_ein_business_number(Some("12-3456789".to_string()));
    state.users.create_user(&user).await?;

    let portal = generate_seed_portal(user.id, Utc::now().date_naive());
    for job in &portal.jobs {
        state.jobs.create_job(job).await?;
    }
    for file in &portal.files {
        state.jobs.add_job_file(file).await?;
    }
    for bill in &portal.bills {
        state.bills.create_bill(bill).await?;
    }
    for request in &portal.requests {
        state.requests.create_request(request).await?;
    }

    tracing::info!(
        shipments = shipment_count,
        jobs = portal.jobs.len(),
        bills = portal.bills.len(),
        email = DEMO_EMAIL,
        "Seeded demo data"
    );
    Ok(())
}
