// SPDX-License-Identifier: MPL-2.0
//! `iced_post` posts transient UI items (messages, badges, toasts) onto a
//! presentation surface, in serial or parallel, and removes them again on a
//! timer, a gesture or an explicit call.
//!
//! The orchestration in [`post`] is toolkit-independent; [`ui`] provides
//! ready-made iced containers built on top of it.

#![doc(html_root_url = "https://docs.rs/iced_post/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod post;
pub mod ui;
