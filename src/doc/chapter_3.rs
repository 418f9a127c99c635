/*!
# Statements

Statements are tried in the order listed. A body is zero or more
statements; it ends where nothing else matches.
*/

#[path = "statements/synchronized.rs"]
#[allow(non_snake_case)]
pub mod BIND;

#[path = "statements/cout.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod CYCLE;

#[path = "statements/format.rs"]
#[allow(non_snake_case)]
pub mod LOOP;

#[path = "statements/trigger.rs"]
#[allow(non_snake_case)]
pub mod INVOKE;

#[path = "statements/proc.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod ACCUMULATE;

#[path = "statements/case.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/def.rs"]
#[allow(non_snake_case)]
pub mod STACK;
