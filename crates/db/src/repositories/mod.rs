pub mod doll_repo;

pub use doll_repo::DollRepo;
