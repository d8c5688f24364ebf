//! Handles board-specific CPU startup

use cortex_m_rt::{entry, exception, ExceptionFrame};

use super::board::{safe, steal_console, Board};

// This function must be implemented by the application that uses the crate
// and is the entry-point for that application after board initialization
extern "Rust" {
    fn stellaris_main(board: Board) -> !;
}

/// Reset entry point: bring up clocks and the console, then hand the board
/// to the application.
///
/// cortex-m-rt has already copied .data and zeroed .bss by the time this runs.
#[entry]
fn call_main() -> ! {
    let board = Board::new();
    unsafe { stellaris_main(board) }
}

/// A HardFault is an exception that occurs because of an error during
/// exception processing, or because an exception cannot be managed by any
/// other exception mechanism. HardFaults have a fixed priority of -1, meaning
/// they have higher priority than any exception with configurable priority.
#[exception]
unsafe fn HardFault(sf: &ExceptionFrame) -> ! {
    let mut console = steal_console();
    let _ = ufmt::uwriteln!(&mut console, "HardFault @ PC={}", sf.pc());

    safe();
}

/// A Non Maskable Interrupt (NMI) can be signalled by a peripheral or
/// triggered by software. This is the highest priority exception other than
/// reset.
#[exception]
unsafe fn NonMaskableInt() {
    safe();
}

/// A MemManage fault is an exception that occurs because of a memory
/// protection related fault, including execution from Execute Never (XN)
/// memory regions.
#[exception]
fn MemoryManagement() {
    safe();
}

/// A BusFault is an exception that occurs because of a memory related fault
/// for an instruction or data memory transaction.
#[exception]
fn BusFault() {
    safe();
}

/// A UsageFault is an exception that occurs because of a fault related to
/// instruction execution: undefined instruction, illegal unaligned access,
/// invalid state, or (when enabled) division by zero.
#[exception]
fn UsageFault() {
    safe();
}

/// Debug monitor interrupt handler.
#[exception]
fn DebugMonitor() {
    // Nothing
}

/// Nothing in this crate enables interrupts; anything that still fires lands here.
#[exception]
unsafe fn DefaultHandler(_irq_number: i16) {
    // Nothing
}
