// file: src/identity.rs
// version: 1.0.0
// guid: 5ffb2227-e3e7-4529-bba6-a14a17b5cbdf

//! User and group id resolution against the system identity database

use crate::error::SetupError;
use crate::Result;
use nix::unistd::{Group, User};
use tracing::info;

/// Numeric ids the shared files end up owned by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
}

/// Look up `user` and `group` and return their numeric ids
pub fn resolve_identity(user: &str, group: &str) -> Result<Identity> {
    info!("looking up ids for user {} and group {}", user, group);

    let group_entry = Group::from_name(group)
        .map_err(|e| SetupError::lookup(format!("group {}: {}", group, e)))?
        .ok_or_else(|| SetupError::lookup(format!("unknown group {}", group)))?;

    let user_entry = User::from_name(user)
        .map_err(|e| SetupError::lookup(format!("user {}: {}", user, e)))?
        .ok_or_else(|| SetupError::lookup(format!("unknown user {}", user)))?;

    Ok(Identity {
        uid: user_entry.uid.as_raw(),
        gid: group_entry.gid.as_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::unistd::{getgid, getuid};

    #[test]
    fn test_resolve_current_identity() {
        let user = User::from_uid(getuid()).unwrap().unwrap();
        let group = Group::from_gid(getgid()).unwrap().unwrap();

        let identity = resolve_identity(&user.name, &group.name).unwrap();

        assert_eq!(identity.uid, getuid().as_raw());
        assert_eq!(identity.gid, getgid().as_raw());
    }

    #[test]
    fn test_unknown_user() {
        let group = Group::from_gid(getgid()).unwrap().unwrap();

        let err = resolve_identity("no-such-user-raspi-share", &group.name).unwrap_err();
        assert!(matches!(err, SetupError::Lookup(_)));
        assert!(err.to_string().contains("no-such-user-raspi-share"));
    }

    #[test]
    fn test_unknown_group() {
        let user = User::from_uid(getuid()).unwrap().unwrap();

        let err = resolve_identity(&user.name, "no-such-group-raspi-share").unwrap_err();
        assert!(matches!(err, SetupError::Lookup(_)));
        assert!(err.to_string().contains("no-such-group-raspi-share"));
    }
}
