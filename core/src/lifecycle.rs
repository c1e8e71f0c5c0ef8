// SPDX-License-Identifier: GPL-3.0-only

/// Lifecycle hooks a host drives a widget through.
///
/// A widget is created detached, mounted once it becomes part of the host's
/// view, reconfigured any number of times and finally unmounted.
pub trait Lifecycle {
    type Config;

    /// Builds the widget's markup and performs the initial render
    fn mount(&mut self);

    /// Replaces the whole configuration and re-renders
    fn on_config_changed(&mut self, config: Self::Config);

    fn unmount(&mut self);
}
