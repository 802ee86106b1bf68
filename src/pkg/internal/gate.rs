use std::{collections::BTreeSet, fmt};

use super::{adaptors::users::spec::Role, auth::Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Login,
    Register,
    Logout,
    PostJob,
    AdminAccess,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Login => "login",
            Capability::Register => "register",
            Capability::Logout => "logout",
            Capability::PostJob => "post-job",
            Capability::AdminAccess => "admin-access",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    pub fn allows(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Capabilities(iter.into_iter().collect())
    }
}

pub fn capabilities(session: &Session) -> Capabilities {
    match session {
        Session::Anonymous => [Capability::Login, Capability::Register].into_iter().collect(),
        Session::Unverified(_) => [Capability::Logout].into_iter().collect(),
        Session::Verified(identity) => match identity.role {
            Role::Employer => [Capability::Logout, Capability::PostJob].into_iter().collect(),
            Role::Admin => [Capability::Logout, Capability::AdminAccess].into_iter().collect(),
            Role::Candidate => [Capability::Logout].into_iter().collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::seed;

    fn verified(role: Role) -> Session {
        let mut identity = seed::users().remove(0);
        identity.role = role;
        Session::Verified(identity)
    }

    #[test]
    fn test_anonymous_can_only_sign_in() {
        let caps = capabilities(&Session::Anonymous);
        assert_eq!(
            caps.iter().collect::<Vec<_>>(),
            vec![Capability::Login, Capability::Register]
        );
        assert!(!caps.allows(Capability::PostJob));
        assert!(!caps.allows(Capability::AdminAccess));
        assert!(!caps.allows(Capability::Logout));
    }

    #[test]
    fn test_role_capabilities() {
        let employer = capabilities(&verified(Role::Employer));
        assert!(employer.allows(Capability::PostJob));
        assert!(!employer.allows(Capability::AdminAccess));

        let admin = capabilities(&verified(Role::Admin));
        assert!(admin.allows(Capability::AdminAccess));
        assert!(!admin.allows(Capability::PostJob));

        for role in [Role::Admin, Role::Employer, Role::Candidate] {
            let caps = capabilities(&verified(role));
            assert!(caps.allows(Capability::Logout));
            assert!(!caps.allows(Capability::Login));
            assert!(!caps.allows(Capability::Register));
        }
    }

    #[test]
    fn test_unverified_employer_cannot_post() {
        let mut identity = seed::users().remove(1);
        identity.verified_email = false;
        let caps = capabilities(&Session::from_identity(identity));
        assert_eq!(caps.iter().collect::<Vec<_>>(), vec![Capability::Logout]);
        assert_eq!(Capability::PostJob.to_string(), "post-job");
    }
}
