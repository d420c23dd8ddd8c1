use snake_engine::Cell;

pub fn tile_color(cell: Cell) -> egui::Color32 {
    match cell {
        Cell::Empty => egui::Color32::from_rgb(34, 34, 38),
        Cell::Wall => egui::Color32::from_rgb(96, 92, 88),
        Cell::Head => egui::Color32::from_rgb(40, 90, 200),
        Cell::Body => egui::Color32::from_rgb(90, 140, 230),
        Cell::GoodFood => egui::Color32::from_rgb(70, 190, 80),
        Cell::BadFood => egui::Color32::from_rgb(215, 60, 55),
    }
}
