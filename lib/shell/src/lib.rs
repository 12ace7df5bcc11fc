//! # sparsegraph Shell
//!
//! Line-oriented command shell driving a [`sparsegraph_core::Graph`].
//!
//! ```rust
//! use sparsegraph_shell::{Flow, Shell, ShellConfig};
//!
//! let mut shell = Shell::new(ShellConfig::default());
//! shell.execute("vertex a").unwrap();
//! shell.execute("vertex b").unwrap();
//! shell.execute("edge a->b 5").unwrap();
//! assert_eq!(shell.execute("quit").unwrap(), Flow::Quit);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod shell;

pub use command::{Command, HELP};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use export::save_dot;
pub use shell::{report, Flow, Shell};
