use gloo_timers::future::sleep;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use storefront_wasm::infrastructure::Debouncer;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn rapid_changes_leave_one_pending_timer() {
    let debouncer = Debouncer::new(30);
    let fired = Rc::new(Cell::new(0u32));
    let last = Rc::new(Cell::new(0u32));

    for i in 1..=10 {
        let (fired, last) = (Rc::clone(&fired), Rc::clone(&last));
        debouncer.schedule(move || {
            fired.set(fired.get() + 1);
            last.set(i);
        });
        assert!(debouncer.is_pending());
    }

    sleep(Duration::from_millis(80)).await;
    assert_eq!(fired.get(), 1);
    assert_eq!(last.get(), 10);
    assert!(!debouncer.is_pending());
}

#[wasm_bindgen_test(async)]
async fn cancel_drops_pending_callback() {
    let debouncer = Debouncer::new(20);
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    debouncer.schedule(move || flag.set(true));
    debouncer.cancel();
    assert!(!debouncer.is_pending());

    sleep(Duration::from_millis(50)).await;
    assert!(!fired.get());
}
