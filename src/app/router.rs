//! Screen Routing
//!
//! Stack of navigable screens. Pushing is the only transition the shipped
//! flows use; `pop` stays available as the back-navigation extension point.

use serde::Serialize;

use super::screens::{RootScreen, WorkspaceDetailScreen, WorkspaceEditScreen};

/// One navigable unit of application state
#[derive(Debug, Clone, Serialize)]
pub enum Screen {
    Root(RootScreen),
    WorkspaceDetail(WorkspaceDetailScreen),
    WorkspaceEdit(WorkspaceEditScreen),
}

impl Screen {
    /// Stable routing segment for the shell
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Root(_) => "workspaces",
            Screen::WorkspaceDetail(_) => "workspace",
            Screen::WorkspaceEdit(_) => "workspace-edit",
        }
    }
}

pub struct Router {
    stack: Vec<Screen>,
}

impl Router {
    /// Starts on the root screen with an unloaded workspace list
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Root(RootScreen::new())],
        }
    }

    pub fn current(&self) -> &Screen {
        // The stack always holds at least the root screen
        self.stack.last().expect("navigation stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Back navigation; refuses to pop the root screen
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub(super) fn root(&self) -> &RootScreen {
        match &self.stack[0] {
            Screen::Root(root) => root,
            // push never writes below the root and pop never removes it
            _ => unreachable!("bottom of the navigation stack is the root screen"),
        }
    }

    pub(super) fn root_mut(&mut self) -> &mut RootScreen {
        match &mut self.stack[0] {
            Screen::Root(root) => root,
            _ => unreachable!("bottom of the navigation stack is the root screen"),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
