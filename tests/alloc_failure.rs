// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allocation-failure behavior, driven by a global allocator that can be told
//! to refuse requests on the current thread.

// Crate imports
use elastic_vec::{ElasticVec, Error};

// Std imports
use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    rc::Rc,
};

/// Delegates to `System` unless the current thread has switched failure on.
struct Flaky;

thread_local! {
    static REFUSE: Cell<bool> = const { Cell::new(false) };
}

fn refusing() -> bool {
    REFUSE.with(Cell::get)
}

// SAFETY: every request is either forwarded to `System` unchanged or answered
// with null, which the `GlobalAlloc` contract allows.
unsafe impl GlobalAlloc for Flaky {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if refusing() {
            return core::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if refusing() {
            return core::ptr::null_mut();
        }
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: Flaky = Flaky;

/// Refuses allocations on this thread until dropped.
struct Refuse;

impl Refuse {
    fn start() -> Self {
        REFUSE.with(|r| r.set(true));
        Refuse
    }
}

impl Drop for Refuse {
    fn drop(&mut self) {
        REFUSE.with(|r| r.set(false));
    }
}

/// Tagged value that counts its drops.
#[derive(Clone)]
struct Tracked {
    tag: u32,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn tags(v: &ElasticVec<Tracked>) -> Vec<u32> {
    v.iter().map(|t| t.tag).collect()
}

fn filled(drops: &Rc<Cell<usize>>, n: u32) -> ElasticVec<Tracked> {
    let mut v = ElasticVec::new();
    for tag in 0..n {
        v.push(Tracked {
            tag,
            drops: Rc::clone(drops),
        })
        .unwrap();
    }
    v
}

#[test]
fn test_failed_shrink_restores_popped_element() {
    let drops = Rc::new(Cell::new(0));
    let mut v = filled(&drops, 5);
    assert_eq!((v.len(), v.capacity()), (5, 8));

    // 2 * 4 < 8 is false: no reallocation needed.
    assert_eq!(v.pop().map(|t| t.tag).ok(), Some(4));
    assert_eq!(drops.get(), 1);

    let (popped, removed) = {
        let _refuse = Refuse::start();
        (v.pop().map(|t| t.tag), v.remove_last())
    };
    assert_eq!(popped, Err(Error::AllocFailed));
    assert_eq!(removed, Err(Error::AllocFailed));
    assert_eq!((v.len(), v.capacity()), (4, 8));
    assert_eq!(tags(&v), [0, 1, 2, 3]);
    // Nothing was dropped by the failed removals.
    assert_eq!(drops.get(), 1);

    // With the allocator back, the same removal shrinks as usual.
    v.remove_last().unwrap();
    assert_eq!((v.len(), v.capacity()), (3, 4));
    assert_eq!(drops.get(), 2);

    drop(v);
    assert_eq!(drops.get(), 5);
}

#[test]
fn test_failed_growth_keeps_extend_prefix() {
    let drops = Rc::new(Cell::new(0));
    let mut v = filled(&drops, 3);
    assert_eq!(v.capacity(), 4);
    let src: Vec<Tracked> = (10..13)
        .map(|tag| Tracked {
            tag,
            drops: Rc::clone(&drops),
        })
        .collect();

    let res = {
        let _refuse = Refuse::start();
        // The first clone fits in the spare slot; the second needs to grow.
        v.extend_from_slice(&src)
    };
    assert_eq!(res, Err(Error::AllocFailed));
    assert_eq!((v.len(), v.capacity()), (4, 4));
    assert_eq!(tags(&v), [0, 1, 2, 10]);
    // Only the clone that could not be stored was dropped.
    assert_eq!(drops.get(), 1);

    drop(v);
    assert_eq!(drops.get(), 5);
    drop(src);
    assert_eq!(drops.get(), 8);
}

#[test]
fn test_failed_push_drops_value_and_keeps_contents() {
    let drops = Rc::new(Cell::new(0));
    let mut v = filled(&drops, 2);
    let extra = Tracked {
        tag: 99,
        drops: Rc::clone(&drops),
    };

    let res = {
        let _refuse = Refuse::start();
        v.push(extra)
    };
    assert_eq!(res, Err(Error::AllocFailed));
    assert_eq!((v.len(), v.capacity()), (2, 2));
    assert_eq!(tags(&v), [0, 1]);
    assert_eq!(drops.get(), 1);

    drop(v);
    assert_eq!(drops.get(), 3);
}

#[test]
fn test_failed_construction_drops_value_once() {
    let drops = Rc::new(Cell::new(0));
    let value = Tracked {
        tag: 7,
        drops: Rc::clone(&drops),
    };

    let res = {
        let _refuse = Refuse::start();
        ElasticVec::from_elem(3, value).map(|v| v.len())
    };
    assert_eq!(res, Err(Error::AllocFailed));
    assert_eq!(drops.get(), 1);
}
