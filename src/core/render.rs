use crate::domain::model::{KernelParameters, Triplet};
use crate::domain::table::ParameterTable;

const HEADER: &str = r#"/*****************************************************************************
 *  CP2K: A general program to perform molecular dynamics simulations        *
 *  Copyright (C) 2000 - 2018  CP2K developers group                         *
 *****************************************************************************/

/*****************************************************************************
 *  FILE GENERATED BY SCRIPT 'generate_parameters' DO NOT EDIT               *
 *****************************************************************************/

#ifndef PARAMETERS_H
#define PARAMETERS_H

#include "parameters_utils.h"

/*
 * Lookup table: given a triplet (m, n, k) describing a matrix-matrix multiplication, look up its optimal kernel parameters
 *
 * Keys:
 *   (m, n, k)
 *
 * Values: array of 8 integers with elements:
 *   0: mm algorithm (enum defined in libcusmm.h, possible values: 1, 2, 3, 4, 5)
 *   1: tile_m
 *   2: tile_n
 *   3: w
 *   4: v
 *   5: threads
 *   6: grouping
 *   7: minblocks
 *
 * Note: for the matrix matrix multiplication algorithms which take less than 8 parameters (i.e. "tiny", "small" and "medium"),
 * the superfluous parameters are set to 0
 */

static const std::unordered_map<Triplet, KernelParameters> ht  = {
"#;

const FOOTER: &str = "};\n\n#endif\n//EOF\n";

/// One initializer-list line, e.g.
/// `    { {{  4,   4,   4}}, {{ 5, 0, 0, 0, 0, 64, 16, 12 }} },`
pub fn render_entry(key: &Triplet, pars: &KernelParameters) -> String {
    let [algo, tile_m, tile_n, w, v, threads, grouping, minblocks] = *pars.values();
    format!(
        "    {{ {{{{{:3}, {:3}, {:3}}}}}, {{{{ {}, {}, {}, {}, {}, {}, {}, {} }}}} }},\n",
        key.m, key.n, key.k, algo, tile_m, tile_n, w, v, threads, grouping, minblocks
    )
}

/// Renders the complete `parameters.h`. Identical tables render to identical bytes.
pub fn render_header(table: &ParameterTable) -> String {
    let mut out = String::with_capacity(HEADER.len() + FOOTER.len() + table.len() * 64);
    out.push_str(HEADER);
    for (key, pars) in table.iter() {
        out.push_str(&render_entry(key, pars));
    }
    out.push_str(FOOTER);
    out
}
