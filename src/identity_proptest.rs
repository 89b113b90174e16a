//! Property-based tests for remote URL translation.
//!
//! These tests use proptest to generate remote URLs in each supported form
//! and verify that they all translate to the same `host/owner/repo` identity.

#[cfg(test)]
mod proptest_tests {
    use crate::identity::PackageIdentity;
    use proptest::prelude::*;

    fn host() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,5}){1,2}"
    }

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_][A-Za-z0-9_.-]{0,12}"
            .prop_filter("no trailing .git", |s| !s.ends_with(".git"))
    }

    proptest! {
        /// Property: git@host:owner/repo.git yields exactly host/owner/repo
        #[test]
        fn ssh_shorthand_yields_host_owner_repo(
            host in host(),
            owner in segment(),
            repo in segment(),
        ) {
            let url = format!("git@{}:{}/{}.git", host, owner, repo);
            let identity = PackageIdentity::from_remote_url(&url).unwrap();
            prop_assert_eq!(identity.as_str(), format!("{}/{}/{}", host, owner, repo));
        }

        /// Property: https://host/owner/repo.git yields exactly host/owner/repo
        #[test]
        fn https_url_yields_host_owner_repo(
            host in host(),
            owner in segment(),
            repo in segment(),
        ) {
            let url = format!("https://{}/{}/{}.git", host, owner, repo);
            let identity = PackageIdentity::from_remote_url(&url).unwrap();
            prop_assert_eq!(identity.as_str(), format!("{}/{}/{}", host, owner, repo));
        }

        /// Property: the SSH and HTTPS forms of one remote agree
        #[test]
        fn ssh_and_https_forms_agree(
            host in host(),
            owner in segment(),
            repo in segment(),
        ) {
            let ssh = PackageIdentity::from_remote_url(&format!("git@{}:{}/{}", host, owner, repo)).unwrap();
            let https = PackageIdentity::from_remote_url(&format!("https://{}/{}/{}", host, owner, repo)).unwrap();
            prop_assert_eq!(ssh, https);
        }

        /// Property: the leaf of a translated identity is the repository name
        #[test]
        fn leaf_is_repository_name(
            host in host(),
            owner in segment(),
            repo in segment(),
        ) {
            let url = format!("git@{}:{}/{}.git", host, owner, repo);
            let identity = PackageIdentity::from_remote_url(&url).unwrap();
            prop_assert_eq!(identity.leaf(), repo.as_str());
        }

        /// Property: translation never panics on arbitrary input
        #[test]
        fn translation_never_panics(input in ".*") {
            let _ = PackageIdentity::from_remote_url(&input);
        }
    }
}
