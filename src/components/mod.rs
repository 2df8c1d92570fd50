pub mod hanoi_canvas;
