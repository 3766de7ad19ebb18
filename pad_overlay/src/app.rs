use log::info;

use crate::config::OverlayConfig;
use crate::error::ServiceError;
use crate::host::Overlay;
use crate::navigation::Navigator;
use crate::view::{MenuView, View};

/// Host-facing entry point: checks the asset volume and hands out the
/// navigator that drives the screens.
#[derive(Debug)]
pub struct ControllerOverlayApp {
    config: OverlayConfig,
    mounted: bool,
}

impl ControllerOverlayApp {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            mounted: false,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::with_view(self.config.clone(), self.initial_view())
    }
}

impl Overlay for ControllerOverlayApp {
    fn init_services(&mut self) -> Result<(), ServiceError> {
        if !self.config.asset_root.is_dir() {
            return Err(ServiceError::VolumeMissing(self.config.asset_root.clone()));
        }
        self.mounted = true;
        info!("mounted asset volume {}", self.config.asset_root.display());
        Ok(())
    }

    fn exit_services(&mut self) {
        if self.mounted {
            info!("unmounted asset volume {}", self.config.asset_root.display());
        }
        self.mounted = false;
    }

    fn on_show(&mut self) {
        info!("overlay shown");
    }

    fn on_hide(&mut self) {
        info!("overlay hidden");
    }

    fn initial_view(&self) -> View {
        View::Menu(MenuView::new())
    }
}
