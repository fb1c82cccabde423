// tests/support/mod.rs
// 複数の統合テストバイナリから使われる共通コード。バイナリごとに未使用の
// シンボルが出るため、モジュール単位で警告を抑制する。
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
