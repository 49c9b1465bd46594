mod certificate;
mod certificate_type;
mod dashboard_stats;
mod demo_wallet;
mod profile_patches;
mod user_role;
