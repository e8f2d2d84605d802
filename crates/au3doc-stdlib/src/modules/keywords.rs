//! Native language keywords; no include required

use au3doc_core::SignatureTable;

use super::sig;

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "ContinueLoop",
            "ContinueLoop",
            "Continue a While/Do/For loop with the next iteration",
            &[],
        ),
        sig(
            "ExitLoop",
            "ExitLoop",
            "Terminate a While/Do/For loop",
            &[],
        ),
        sig(
            "Func",
            "Func",
            "Defines a user-defined function taking zero or more arguments, closed by EndFunc",
            &[],
        ),
        sig(
            "If",
            "If",
            "Conditionally run a statement when an expression is true: If <expression> Then <statement>",
            &[],
        ),
        sig(
            "Return",
            "Return",
            "Exits a user-defined function, optionally with a value",
            &[],
        ),
        sig(
            "While",
            "While",
            "Loop based on an expression, tested before each iteration, closed by WEnd",
            &[],
        ),
    ]
}
