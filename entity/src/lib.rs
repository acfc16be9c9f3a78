pub mod account;
pub mod post;

/*
 Accounts start out unverified. A mailed one-time code flips `verified`; the
 stored columns only ever hold the HMAC commitment of a code, never the code
 itself. Posts hang off accounts and are only writable by their owner.
 */
