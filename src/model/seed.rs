// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The neighbourhood points of interest shown on the map.

use crate::model::Location;

const SEED: [(&str, f64, f64, &str); 5] = [
    ("Beverly Street", 6.890622, 79.858873, "4c26f4ed3703d13a175da636"),
    ("Barista", 6.910408, 79.861888, "4ba06f61f964a520986d37e3"),
    ("Baskin Robins", 6.907677, 79.850826, "4be3f02921d5a593a6391a11"),
    ("Sinhalese Sports Club", 6.905750, 79.869462, "53c28e2b498ed626a1253248"),
    ("Cinnamon Grand Colombo", 6.917900, 79.848445, "4bd10754b221c9b66c02d5d0"),
];

/// Builds the dataset in its fixed display order.
pub(crate) fn seed_locations() -> Vec<Location> {
    SEED.iter()
        .map(|&(name, lat, lng, venue_id)| Location::new(name, lat, lng, venue_id))
        .collect()
}
