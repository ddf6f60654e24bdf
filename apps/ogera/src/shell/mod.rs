//! Application shell — owns the tab selection and the mounted screen's local state.

pub mod handlers;

use serde::Serialize;
use tracing::debug;

use crate::models::Identity;
use crate::navigation::{items_for, resolve, MenuItem, Screen, HOME_TAB};
use crate::screens::{self, JobBoardState, LocalState, ScreenContext, ScreenView};
use crate::session::IdentityDirectory;

#[derive(Debug, Clone)]
pub struct Shell {
    tab: String,
    local: LocalState,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            tab: HOME_TAB.to_string(),
            local: LocalState::default(),
        }
    }
}

/// Everything the client needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ShellView {
    /// `None` while logged out.
    pub tab: Option<String>,
    pub screen: Screen,
    pub menu: Vec<MenuItem>,
    pub view: ScreenView,
}

impl Shell {
    #[cfg(test)]
    pub fn tab(&self) -> &str {
        &self.tab
    }

    /// Remounts the shell: home tab, fresh local state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn screen(&self, identity: Option<&Identity>) -> Screen {
        identity.map_or(Screen::Login, |i| resolve(i.role, &self.tab))
    }

    /// Selects `tab`. When the resolved screen changes, the previous screen is
    /// unmounted and its local state dropped.
    pub fn select_tab(&mut self, identity: &Identity, tab: &str) -> Screen {
        let previous = resolve(identity.role, &self.tab);
        let next = resolve(identity.role, tab);
        if previous != next {
            debug!("Unmounting {previous:?}, mounting {next:?}");
            self.local = LocalState::default();
        }
        self.tab = tab.to_string();
        next
    }

    /// The job board's local state, only while the job board is mounted.
    pub fn job_board_mut(&mut self, identity: &Identity) -> Option<&mut JobBoardState> {
        match resolve(identity.role, &self.tab) {
            Screen::JobBoard => Some(&mut self.local.job_board),
            _ => None,
        }
    }

    /// Renders the current frame. Without an identity only the login screen is shown.
    pub fn compose(
        &self,
        ctx: Option<&ScreenContext<'_>>,
        directory: &IdentityDirectory,
    ) -> ShellView {
        match ctx {
            Some(ctx) => {
                let screen = resolve(ctx.identity.role, &self.tab);
                ShellView {
                    tab: Some(self.tab.clone()),
                    screen,
                    menu: items_for(ctx.identity.role).to_vec(),
                    view: screens::render(screen, ctx, &self.local),
                }
            }
            None => ShellView {
                tab: None,
                screen: Screen::Login,
                menu: Vec::new(),
                view: screens::render_login(directory),
            },
        }
    }
}
