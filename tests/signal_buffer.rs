use livescope::data::buffer::SignalBuffer;

// Helper: push a run of samples where the value mirrors the timestamp.
fn push_times(buffer: &mut SignalBuffer, times: &[f64]) {
    for &t in times {
        buffer.push(t, t);
    }
}

// Helper: the retained timestamps, oldest first.
fn times(buffer: &SignalBuffer) -> Vec<f64> {
    buffer.iter().map(|sample| sample[0]).collect()
}

#[test]
fn push_caps_length_and_drops_the_oldest() {
    let mut buffer = SignalBuffer::new(3);
    push_times(&mut buffer, &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(buffer.len(), 3, "capacity should cap the sample count");
    assert_eq!(
        times(&buffer),
        vec![1.0, 2.0, 3.0],
        "the oldest sample should be dropped first"
    );
}

#[test]
fn window_eviction_keeps_one_sample_before_the_window() {
    let mut buffer = SignalBuffer::new(100);
    push_times(&mut buffer, &[0.0, 5.0, 16.0]);
    buffer.evict_to_window(10.0);
    assert_eq!(
        times(&buffer),
        vec![5.0, 16.0],
        "t=5 lies outside [6, 16] but must stay so the trace reaches the left edge"
    );
}

#[test]
fn eviction_boundary_is_strict() {
    let mut buffer = SignalBuffer::new(100);
    push_times(&mut buffer, &[0.0, 10.0, 20.0]);
    buffer.evict_to_window(10.0);
    // Second-oldest age is exactly the span; strictly-greater keeps it.
    assert_eq!(
        times(&buffer),
        vec![0.0, 10.0, 20.0],
        "a second-oldest sample exactly time_span old should survive"
    );

    buffer.push(20.5, 20.5);
    buffer.evict_to_window(10.0);
    assert_eq!(
        times(&buffer),
        vec![10.0, 20.0, 20.5],
        "once the second-oldest is older than the span the front should go"
    );
}

#[test]
fn steady_stream_converges_on_the_window() {
    let mut buffer = SignalBuffer::new(100);
    for t in 0..=15 {
        buffer.push(t as f64, t as f64);
        buffer.evict_to_window(10.0);
    }
    assert_eq!(buffer.len(), 12, "a 10 s window over 1 Hz samples holds 12 points");
    assert_eq!(
        buffer.oldest().map(|sample| sample[0]),
        Some(4.0),
        "the retained run should start at t=4"
    );
    assert_eq!(buffer.newest().map(|sample| sample[0]), Some(15.0));
}

#[test]
fn narrowing_the_window_reevicts_in_one_pass() {
    let mut buffer = SignalBuffer::new(100);
    for t in 4..=15 {
        buffer.push(t as f64, t as f64);
    }
    buffer.evict_to_window(1.0);
    assert_eq!(
        times(&buffer),
        vec![13.0, 14.0, 15.0],
        "shrinking the span should drop everything older than one extra sample"
    );
}

#[test]
fn lone_sample_is_never_evicted() {
    let mut buffer = SignalBuffer::new(100);
    buffer.evict_to_window(0.5);
    assert!(buffer.is_empty(), "evicting an empty buffer is a no-op");

    buffer.push(1000.0, 42.0);
    buffer.evict_to_window(0.5);
    assert_eq!(buffer.len(), 1, "the last sample always stays");
}

#[test]
fn out_of_order_timestamps_do_not_panic() {
    let mut buffer = SignalBuffer::new(100);
    push_times(&mut buffer, &[10.0, 5.0, 20.0]);
    buffer.evict_to_window(10.0);
    assert_eq!(
        times(&buffer),
        vec![5.0, 20.0],
        "eviction should still terminate on non-monotonic input"
    );
}

#[test]
fn ends_are_readable_without_consuming() {
    let mut buffer = SignalBuffer::new(4);
    assert_eq!(buffer.oldest(), None);
    assert_eq!(buffer.newest(), None);

    push_times(&mut buffer, &[1.0, 2.0, 3.0]);
    assert_eq!(buffer.oldest(), Some([1.0, 1.0]));
    assert_eq!(buffer.newest(), Some([3.0, 3.0]));
    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.max_len(), 4);
}
