pub mod bubble_sort;
pub mod kth_largest;
pub mod merge_sort;
pub mod quick_sort;
