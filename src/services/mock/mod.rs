/*
 * Responsibility
 * - handler が返す mock/rule-based payload の生成
 * - 乱数は RngSource から request ごとに作る (共有 mutable state を持たない)
 * - 時刻は引数で受け取る (テストで固定できるように)
 */
pub mod insights;
pub mod predictions;
pub mod rng;

pub use rng::RngSource;
