/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストの Identity を handler に提供する
 * - token の中身には触れない (検証は middleware::auth の責務)
 */

mod current_user;

pub use current_user::CurrentUser;
