//! Panic handling for debug builds
//!
//! Release builds link `panic-never` instead, so any reachable panic becomes a
//! link error.

#[cfg(debug_assertions)]
use super::board;

#[cfg(debug_assertions)]
use core::panic::PanicInfo;

#[cfg(debug_assertions)]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let mut console = unsafe { board::steal_console() };
    match info.location() {
        Some(location) => {
            let _ = ufmt::uwriteln!(
                &mut console,
                "panic at {}:{}",
                location.file(),
                location.line()
            );
        }
        None => {
            let _ = ufmt::uwriteln!(&mut console, "panic");
        }
    }
    board::safe();
}
