//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Lite Browser Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Lite Browser"
# width = 1200
# height = 800
# titlebar_height = 36   # 0-100, surfaces are placed below it

[sidebar]
# width = 260            # 120-600
# hide_delay_ms = 300    # 0-5000, delay before hiding after pointer leaves
# start_visible = true
# start_pinned = false

[search]
# engine = "https://www.google.com/search?q={query}"   # must contain {query}

[keybinds]
# new_tab = "Ctrl+T"
# close_tab = "Ctrl+W"
# focus_address_bar = "Ctrl+L"
# reload = "Ctrl+R"
# reload_alt = "F5"
# open_search = "Ctrl+Space"
# escape = "Escape"
# next_tab = "Ctrl+Tab"
# prev_tab = "Ctrl+Shift+Tab"
# toggle_sidebar = "Ctrl+B"
# go_back = "Alt+Left"
# go_forward = "Alt+Right"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
