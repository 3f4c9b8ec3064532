use bmap_view::{BitmapView, ErrCode, Run};
use log::info;
use simple_logger::SimpleLogger;

/// A page-frame bitmap as an allocator would keep it: set bits are busy.
#[derive(Debug)]
pub struct FrameMap {
    bytes: Vec<u8>,
    frames: usize,
}

impl FrameMap {
    pub fn new(frames: usize) -> Self {
        Self {
            bytes: vec![0u8; frames.div_ceil(8)],
            frames,
        }
    }

    pub fn mark_busy(&mut self, start: usize, len: usize) {
        for frame in start..start + len {
            self.bytes[frame / 8] |= 1 << (frame % 8);
        }
    }

    pub fn mark_free(&mut self, start: usize, len: usize) {
        for frame in start..start + len {
            self.bytes[frame / 8] &= !(1 << (frame % 8));
        }
    }

    pub fn view(&self) -> BitmapView<'_> {
        BitmapView::new(&self.bytes, self.frames)
    }
}

fn logger_init() {
    SimpleLogger::new().init().unwrap();
}

fn make_scenario() -> FrameMap {
    let mut map = FrameMap::new(32);
    map.mark_busy(10, 6);
    map
}

fn count_test(map: &FrameMap) {
    let view = map.view();
    assert_eq!(view.count_in_range(0, 32, true), 6);
    assert_eq!(view.count_in_range(0, 32, false), 26);
    assert_eq!(view.count_slow(true), 6);
    assert_eq!(view.count_in_range(12, 10, false), 6);
}

fn search_test(map: &FrameMap) {
    let view = map.view();
    assert_eq!(view.find_first_set(), Some(10));
    assert_eq!(view.find_first_unset(), Some(0));
    let busy = view.find_one_anywhere_set(31).expect("find busy frame failed");
    assert!((10..16).contains(&busy));
    let free = view.find_one_anywhere_unset(12).expect("find free frame failed");
    assert!(!view.get(free));
}

fn policy_test(map: &FrameMap) {
    let view = map.view();
    assert_eq!(view.find_first_fit(4), Some(0));
    assert_eq!(view.find_first_fit(7), Some(0));
    assert_eq!(view.find_best_fit(4), Some(0));
    assert_eq!(
        view.find_longest_range_of_unset_bits(32),
        Some(Run::new(16, 16))
    );
}

fn allocate_until_full_test() {
    let mut map = FrameMap::new(1000);
    let mut allocated = 0;
    while let Some(start) = map.view().find_best_fit(7) {
        map.mark_busy(start, 7);
        allocated += 1;
    }
    assert_eq!(allocated, 1000 / 7);
    assert_eq!(map.view().count_slow(false), 1000 % 7);

    // Free a hole in the middle and make sure best fit lands in it
    map.mark_free(490, 7);
    assert_eq!(map.view().find_best_fit(7), Some(490));
    assert_eq!(map.view().find_first_fit(8), None);
}

fn short_buffer_test() {
    let bytes = [0u8; 3];
    let err = BitmapView::try_new(&bytes, 25).expect_err("short buffer accepted");
    assert_eq!(err.code(), ErrCode::EINVAL);
    info!("{}", err);
}

fn main() {
    logger_init();
    log::set_max_level(log::LevelFilter::Info);
    let map = make_scenario();
    println!("scenario bitmap created");
    count_test(&map);
    println!("count test done");
    search_test(&map);
    println!("search test done");
    log::set_max_level(log::LevelFilter::Debug);
    policy_test(&map);
    println!("policy test done");
    log::set_max_level(log::LevelFilter::Off);
    allocate_until_full_test();
    println!("allocate until full test done");
    log::set_max_level(log::LevelFilter::Debug);
    short_buffer_test();
    println!("short buffer test done");
}
