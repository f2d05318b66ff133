//! Activation contracts
//!
//! - The current link is relative to the directory that holds it
//! - The link is sent with the link-preserving flag set into that directory

use std::sync::Arc;

use cutover::domain::ports::TransferOptions;
use cutover::{ActivationSwap, RawConfig};

use crate::common::*;

fn swap_with(current_path: &str, remote: Arc<FakeRemote>) -> ActivationSwap {
    let raw = RawConfig {
        username: Some("deploy".to_string()),
        host: Some("example.com".to_string()),
        releases_path: Some(RELEASES.to_string()),
        current_path: Some(current_path.to_string()),
        ..RawConfig::default()
    };
    ActivationSwap::new(Arc::new(raw.resolve().unwrap()), remote)
}

#[test]
fn contract_link_inside_releases_is_sibling_relative() {
    let remote = Arc::new(FakeRemote::new());
    swap_with("current", remote.clone()).activate("abc123").unwrap();

    assert_eq!(
        remote.link("/srv/app/releases/current").as_deref(),
        Some("abc123")
    );
    let call = remote.calls_of(Kind::LinkPush).remove(0);
    assert_eq!(call.remote, "/srv/app/releases/");
    assert_eq!(call.options, TransferOptions::link());
}

#[test]
fn contract_link_outside_releases_walks_up() {
    let remote = Arc::new(FakeRemote::new());
    swap_with("../current", remote.clone()).activate("abc123").unwrap();

    assert_eq!(
        remote.link("/srv/app/current").as_deref(),
        Some("releases/abc123")
    );
}

#[test]
fn contract_absolute_current_path_is_accepted() {
    let remote = Arc::new(FakeRemote::new());
    swap_with("/var/www/live", remote.clone())
        .activate("abc123")
        .unwrap();

    assert_eq!(
        remote.link("/var/www/live").as_deref(),
        Some("../../srv/app/releases/abc123")
    );
}

#[test]
fn contract_swap_replaces_existing_link() {
    let remote = Arc::new(FakeRemote::new().with_link("/srv/app/releases/current", "old"));
    swap_with("current", remote.clone()).activate("new").unwrap();

    assert_eq!(remote.link("/srv/app/releases/current").as_deref(), Some("new"));
}
