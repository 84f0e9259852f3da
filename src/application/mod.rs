// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (extracting metrics or rendering charts).
//
// Rules for this layer:
//   - No regex or chart-drawing code here
//   - No direct file parsing here (that's Layer 4 and 5)
//   - Only workflow coordination, plus the operator-facing
//     console output the workflows promise
//
// Think of this layer as the "director": it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Log-to-CSV extraction plus the typed reload and preview
pub mod extract_use_case;

// CSV-to-charts rendering
pub mod render_use_case;
