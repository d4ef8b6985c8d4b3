//! # Core Module
//!
//! 애플리케이션 조립과 백그라운드 작업을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 애플리케이션 컨텍스트
//! - **AppContext**: 설정에 따라 저장소/발송기/서비스를 생성하고 연결
//! - **명시적 주입**: 핸들러는 `web::Data<AppContext>`로 서비스를 받음
//!
//! ### [`sweeper`] - 가입 대기 레코드 정리
//! - **주기 정리**: `PENDING_SWEEP_INTERVAL_SECONDS`마다 만료 레코드 삭제

pub mod context;
pub mod sweeper;

pub use context::AppContext;
pub use sweeper::spawn_pending_sweep;
