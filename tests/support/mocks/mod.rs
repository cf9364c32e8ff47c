// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{
    ALICE_ID, ALICE_TOKEN, BOB_ID, BOB_TOKEN, EXPIRED_TOKEN, StaticSessionVerifier, alice_id,
    bob_id,
};

// ユーティリティ関連
pub use util::{DummyClock, TickingClock};

// 記事リポジトリ
pub use article_repos::{FailingReadRepository, InMemoryArticleStore, RacingReadRepository};
