pub mod user_repo;
pub use user_repo::UserRepository;
pub mod family_repo;
pub use family_repo::FamilyRepository;
pub mod medication_repo;
pub use medication_repo::MedicationRepository;
pub mod filter;
pub use filter::MedicationFilter;
pub mod schema;
pub mod seed;
