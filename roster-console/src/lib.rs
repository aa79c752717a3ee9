//! Roster Console - 员工名册终端界面
//!
//! 通过 HTTP API 展示和修改员工记录：表格浏览、新增表单、行内编辑、删除。
//!
//! # 模块结构
//!
//! ```text
//! roster-console/src/
//! ├── app.rs       # 界面状态与按键处理
//! ├── backend.rs   # EmployeeBackend trait (HttpClient 实现)
//! ├── format.rs    # 薪资显示格式
//! ├── logger.rs    # 文件日志 (终端被 TUI 占用)
//! └── ui.rs        # ratatui 渲染
//! ```

pub mod app;
pub mod backend;
pub mod format;
pub mod logger;
pub mod ui;

pub use app::{Action, App, EmployeeForm, Mode};
pub use backend::EmployeeBackend;
