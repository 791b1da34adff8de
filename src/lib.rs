//! # bareheap - A Family of Freestanding Memory Allocators
//!
//! This crate provides four independent memory allocation strategies, each
//! operating on a caller-supplied, already-allocated contiguous byte region
//! rather than an OS heap. Nothing in this crate calls `sbrk`, `mmap`, or
//! any other syscall — the owner of a region (an embedded runtime, a
//! kernel, a test harness) hands a `*mut u8`/`size` pair to `init` and
//! everything past that point is pointer arithmetic over that one region.
//!
//! ## Overview
//!
//! ```text
//!   bump       - monotonic pointer, no free, O(1) allocate
//!   slab       - fixed-size cells, O(1) allocate/free via an embedded
//!                LIFO free list
//!   free_list  - variable-size chunks, first-fit with split-on-allocate,
//!                no coalescing
//!   buddy      - power-of-two blocks, split-on-allocate/merge-on-free,
//!                usage tracked in a side bitmap
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   bareheap
//!   ├── platform   - the host-provided primitives everything else is
//!   │                built on (memset/memcpy/print/abort)
//!   ├── math       - log2_floor / pow2_ceil
//!   ├── align      - align_up / is_aligned
//!   ├── list       - intrusive doubly-linked list (used by free_list)
//!   ├── bump       - BumpAllocator
//!   ├── slab       - SlabAllocator
//!   ├── free_list  - FreeListAllocator
//!   └── buddy      - BuddyAllocator
//! ```
//!
//! ## Error model
//!
//! Every allocator follows the same three-tier contract:
//!
//! 1. Programmer contract violations (null region, undersized auxiliary
//!    buffer, misaligned start, double-free) abort via [`platform::fail`].
//! 2. Resource exhaustion (no block big enough, slab full) returns a null
//!    `*mut u8`.
//! 3. Zero-size or otherwise nonsensical requests also return null,
//!    silently.
//!
//! None of the four `allocate`/`free` methods return `Result` or
//! `Option<NonNull<u8>>` — they return a raw, nullable `*mut u8`, the
//! convention a freestanding allocation API built for C callers settles on.
//!
//! ## Thread safety
//!
//! No allocator type here is `Sync`; each handle assumes exclusive access
//! serialized by its caller (a lock, an interrupt-disabled section, or
//! confinement to a single thread).
#![cfg_attr(not(test), no_std)]

use core::mem::size_of;

pub mod align;
pub mod buddy;
pub mod bump;
pub mod free_list;
pub mod list;
pub mod math;
pub mod platform;

pub use buddy::BuddyAllocator;
pub use bump::BumpAllocator;
pub use free_list::FreeListAllocator;
pub use slab::SlabAllocator;

mod slab;

/// Alignment every [`bump::BumpAllocator`] region and allocation is rounded
/// to. Must be a power of two.
pub const STATIC_ALIGN: usize = 16;

/// Smallest block size a [`buddy::BuddyAllocator`] will ever hand out or
/// split down to. Must be a power of two and at least
/// `size_of::<usize>() * 2` (a free block stores its list node inline).
pub const BUDDY_MIN_BLOCK_SIZE: usize = 32;

/// Hard cap on the number of orders a [`buddy::BuddyAllocator`] will use,
/// regardless of how large a region it is given. Bounds the size of the
/// caller-supplied `free_heads` buffer.
pub const BUDDY_MAX_ORDERS: usize = 32;

const _: () = assert!(STATIC_ALIGN.is_power_of_two());
const _: () = assert!(BUDDY_MIN_BLOCK_SIZE.is_power_of_two());
const _: () = assert!(BUDDY_MIN_BLOCK_SIZE >= size_of::<usize>() * 2);
