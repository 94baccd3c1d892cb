/// Selects the minimum of the unsorted tail into place; calls `on_step`
/// after every outer pass, including passes where the minimum is already
/// in place.
pub fn selection_sort<F: FnMut(&[u8])>(data: &mut [u8], mut on_step: F) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        data.swap(min_index, i);
        on_step(data);
    }
}
