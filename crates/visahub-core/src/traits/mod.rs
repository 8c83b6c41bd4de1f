//! Repository and collaborator traits (ports)

mod repositories;

pub use repositories::{
    CredentialRepository, NewCredential, Notifier, RepoResult, RoleFilter, UserRepository,
};
