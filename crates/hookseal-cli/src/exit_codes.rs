//! Process exit codes. These are part of the CLI contract.

use hookseal_core::Reason;

pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // Missing field, malformed token or body, unsupported alg
pub const CONFIG_ERROR: i32 = 2; // Unreadable input, bad flags, bind failure
// Produced through `Reason::exit_code`.
#[allow(dead_code)]
pub const VERIFICATION_FAILED: i32 = 3; // Unusable key material or internal fault
#[allow(dead_code)]
pub const REJECTED: i32 = 4; // Signature or body digest rejected

/// Exit code for a verification outcome.
pub fn for_reason(reason: Reason) -> i32 {
    reason.exit_code()
}
