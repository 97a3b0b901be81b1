mod cells;
mod material;
mod updated;
