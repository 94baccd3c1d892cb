/// Adjacent-swap passes; calls `on_step` after every swap.
pub fn bubble_sort<F: FnMut(&[u8])>(data: &mut [u8], mut on_step: F) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                on_step(data);
            }
        }
    }
}
