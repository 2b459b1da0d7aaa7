/// Use cases module containing application business logic orchestration
mod update_advisories;

pub use update_advisories::UpdateAdvisoriesUseCase;
