//! 連結リスト系のライブラリ。
//!
//! ## Contents
//!
//! - [`ds`]：データ構造
//!     - [`LinkedSeq`](ds::LinkedSeq)：双方向連結リスト
//!     - [`SortedLinkedSeq`](ds::SortedLinkedSeq)：挿入のたびに昇順を保つ連結リスト
//! - [`naive`]：テスト用の愚直な実装

pub use ds;
pub use naive;
