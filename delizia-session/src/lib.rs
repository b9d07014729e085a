//! Delizia Session - 餐厅网站交互会话核心
//!
//! # 架构概述
//!
//! One visitor session on the Delizia Kitchen site:
//!
//! - **购物车** (`cart`): dish id → quantity ledger and its catalog-joined view
//! - **分类筛选** (`filter`): single active category with toggle-to-clear
//! - **预订表单** (`reservation`): draft, submit validation and the timed
//!   confirmation window
//! - **会话存储** (`store`): one shared handle, intents in, events out
//!
//! # 模块结构
//!
//! ```text
//! delizia-session/src/
//! ├── core/          # 配置、错误
//! ├── catalog/       # 菜品目录
//! ├── cart/          # 购物车
//! ├── filter/        # 分类筛选
//! ├── reservation/   # 预订表单 + 确认计时器
//! ├── store/         # 会话存储 (单一数据源)
//! ├── console.rs     # 命令行前端
//! └── utils/         # 日志
//! ```

pub mod cart;
pub mod catalog;
pub mod console;
pub mod core;
pub mod filter;
pub mod reservation;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use cart::CartLedger;
pub use catalog::{CatalogError, CatalogProvider, StaticCatalog};
pub use core::{Config, SessionError};
pub use filter::CategoryFilter;
pub use reservation::{ConfirmationTimer, ReservationController, ReservationError, TimerError};
pub use store::SessionStore;

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ___      ___      _
  |   \ ___| (_)___ (_) __ _
  | |) / -_) | |_ / | |/ _` |
  |___/\___|_|_/__| |_|\__,_|
        Delizia Kitchen · session console
"#
    );
}
