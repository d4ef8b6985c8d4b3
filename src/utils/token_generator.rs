//! 인증 코드 생성기
//!
//! 메일로 보내는 짧은 인증 코드를 만듭니다. 기본 길이는 8자입니다.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// `length`자 길이의 영문 대소문자/숫자 코드를 생성합니다.
pub fn generate_verification_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
