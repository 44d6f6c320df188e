use crate::screen::{DisplayError, Platform, ScreenSize, ScreenSizeProvider};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::Screen;
use x11rb::rust_connection::RustConnection;
use x11rb::{CURRENT_TIME, NONE};

// GetOutputPrimary first appeared in RandR 1.3.
const RANDR_MAJOR: u32 = 1;
const RANDR_MINOR: u32 = 3;

/// Primary display metrics from the X server named by `DISPLAY`.
///
/// RandR knows which output is primary; the root window alone spans every
/// monitor. When RandR has nothing to say the root screen is reported, which
/// is the primary display on single-head setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct X11Screen;

impl X11Screen {
    /// Size of the default root screen, ignoring RandR.
    pub fn root_screen_size(&self) -> Result<ScreenSize, DisplayError> {
        let (conn, screen_num) = connect()?;
        Ok(root_size(default_screen(&conn, screen_num)?))
    }
}

impl ScreenSizeProvider for X11Screen {
    fn screen_size(&self) -> Result<ScreenSize, DisplayError> {
        let (conn, screen_num) = connect()?;
        let screen = default_screen(&conn, screen_num)?;
        Ok(choose(primary_crtc_size(&conn, screen), root_size(screen)))
    }

    fn platform(&self) -> Platform {
        Platform::Linux
    }
}

fn connect() -> Result<(RustConnection, usize), DisplayError> {
    x11rb::connect(None).map_err(|e| DisplayError::NoDisplay(e.to_string()))
}

fn default_screen(conn: &RustConnection, screen_num: usize) -> Result<&Screen, DisplayError> {
    conn.setup()
        .roots
        .get(screen_num)
        .ok_or_else(|| DisplayError::NoDisplay(format!("X server has no screen {screen_num}")))
}

fn root_size(screen: &Screen) -> ScreenSize {
    ScreenSize::new(
        u32::from(screen.width_in_pixels),
        u32::from(screen.height_in_pixels),
    )
}

/// Picks the primary CRTC size when RandR produced a usable one.
fn choose(primary: Result<Option<ScreenSize>, ReplyError>, root: ScreenSize) -> ScreenSize {
    match primary {
        Ok(Some(size)) if !size.is_empty() => size,
        Ok(Some(size)) => {
            debug!(%size, "RandR primary CRTC is empty, using root screen");
            root
        }
        Ok(None) => {
            debug!("no RandR primary output, using root screen");
            root
        }
        Err(error) => {
            debug!(%error, "RandR query failed, using root screen");
            root
        }
    }
}

fn primary_crtc_size<C: Connection>(
    conn: &C,
    screen: &Screen,
) -> Result<Option<ScreenSize>, ReplyError> {
    let version = conn.randr_query_version(RANDR_MAJOR, RANDR_MINOR)?.reply()?;
    if (version.major_version, version.minor_version) < (RANDR_MAJOR, RANDR_MINOR) {
        debug!(
            major = version.major_version,
            minor = version.minor_version,
            "RandR too old for a primary output"
        );
        return Ok(None);
    }
    let output = conn.randr_get_output_primary(screen.root)?.reply()?.output;
    if output == NONE {
        return Ok(None);
    }
    let crtc = conn.randr_get_output_info(output, CURRENT_TIME)?.reply()?.crtc;
    // A primary output may be disconnected or switched off.
    if crtc == NONE {
        return Ok(None);
    }
    let info = conn.randr_get_crtc_info(crtc, CURRENT_TIME)?.reply()?;
    Ok(Some(ScreenSize::new(u32::from(info.width), u32::from(info.height))))
}
