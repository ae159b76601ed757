//! The fixed documents served to the browser.

/// The bootstrap page: mount point, glue-module reference and the
/// error-reporting tag. Served unchanged for every method and path the
/// router does not otherwise know.
pub const BOOTSTRAP_SHELL: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Weather Dashboard</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <div class="location-input">
      <label>
        Enter Coordinates (Lat, Lon):
        <input id="location" type="text" placeholder="40.7128, -74.0060">
      </label>
    </div>
    <div id="root"></div>
    <script src="https://esm.town/v/std/catch"></script>
    <script type="module" src="/dashboard.js"></script>
  </body>
</html>
"#;

/// Glue module loaded by the shell. Pure transport: it moves rendered HTML
/// into the mount point and forwards coordinate input, no view logic.
pub const DASHBOARD_MODULE: &str = include_str!("../assets/dashboard.js");
