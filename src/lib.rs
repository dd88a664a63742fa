//! Provost tracks the execution of a single unit of provisioning work (a
//! [`Job`](lifecycle::Job)) dispatched to a remote machine, and derives the
//! ordered, OS-filtered list of executable steps
//! ([`JobActions`](actions::JobActions)) the remote agent must run.
//!
//! The core is pure and synchronous: the lifecycle state machine validates
//! states and transitions, and the action list builder filters rendered
//! steps for a target operating system while preserving their order.
//! Persistence, template rendering, authentication and the agent transport
//! are collaborators reached only through the seams in [`store`].

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod store;
pub mod ui;
