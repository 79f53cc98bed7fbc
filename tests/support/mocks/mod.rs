// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール

pub mod identity;
pub mod repos;
pub mod storage;
pub mod time;
pub mod workspace;

// 認証関連
pub use identity::{
    BROKEN_ACCESS, OTHER_USER_ID, RecordingIdentity, TEST_EMAIL, TEST_USER_ID, VALID_ACCESS,
    VALID_REFRESH, other_user, test_user,
};

// リポジトリ関連
pub use repos::{InMemoryComments, InMemoryNotifications, InMemoryProfiles, InMemoryProjects};

// ストレージ・外部ワークスペース
pub use storage::{CapturingStorage, STORAGE_BASE};
pub use workspace::CapturingWorkspace;

// 時刻関連
pub use time::{FixedClock, fixed_now};
