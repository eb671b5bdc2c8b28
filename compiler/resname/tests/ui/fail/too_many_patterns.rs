//! Error: At most 100 patterns may be declared.

use resname::Record;

#[derive(Record)]
#[resname(pattern = "things0/{thing}", pattern = "things1/{thing}", pattern = "things2/{thing}", pattern = "things3/{thing}", pattern = "things4/{thing}", pattern = "things5/{thing}", pattern = "things6/{thing}", pattern = "things7/{thing}", pattern = "things8/{thing}", pattern = "things9/{thing}", pattern = "things10/{thing}", pattern = "things11/{thing}", pattern = "things12/{thing}", pattern = "things13/{thing}", pattern = "things14/{thing}", pattern = "things15/{thing}", pattern = "things16/{thing}", pattern = "things17/{thing}", pattern = "things18/{thing}", pattern = "things19/{thing}", pattern = "things20/{thing}", pattern = "things21/{thing}", pattern = "things22/{thing}", pattern = "things23/{thing}", pattern = "things24/{thing}", pattern = "things25/{thing}", pattern = "things26/{thing}", pattern = "things27/{thing}", pattern = "things28/{thing}", pattern = "things29/{thing}", pattern = "things30/{thing}", pattern = "things31/{thing}", pattern = "things32/{thing}", pattern = "things33/{thing}", pattern = "things34/{thing}", pattern = "things35/{thing}", pattern = "things36/{thing}", pattern = "things37/{thing}", pattern = "things38/{thing}", pattern = "things39/{thing}", pattern = "things40/{thing}", pattern = "things41/{thing}", pattern = "things42/{thing}", pattern = "things43/{thing}", pattern = "things44/{thing}", pattern = "things45/{thing}", pattern = "things46/{thing}", pattern = "things47/{thing}", pattern = "things48/{thing}", pattern = "things49/{thing}", pattern = "things50/{thing}", pattern = "things51/{thing}", pattern = "things52/{thing}", pattern = "things53/{thing}", pattern = "things54/{thing}", pattern = "things55/{thing}", pattern = "things56/{thing}", pattern = "things57/{thing}", pattern = "things58/{thing}", pattern = "things59/{thing}", pattern = "things60/{thing}", pattern = "things61/{thing}", pattern = "things62/{thing}", pattern = "things63/{thing}", pattern = "things64/{thing}", pattern = "things65/{thing}", pattern = "things66/{thing}", pattern = "things67/{thing}", pattern = "things68/{thing}", pattern = "things69/{thing}", pattern = "things70/{thing}", pattern = "things71/{thing}", pattern = "things72/{thing}", pattern = "things73/{thing}", pattern = "things74/{thing}", pattern = "things75/{thing}", pattern = "things76/{thing}", pattern = "things77/{thing}", pattern = "things78/{thing}", pattern = "things79/{thing}", pattern = "things80/{thing}", pattern = "things81/{thing}", pattern = "things82/{thing}", pattern = "things83/{thing}", pattern = "things84/{thing}", pattern = "things85/{thing}", pattern = "things86/{thing}", pattern = "things87/{thing}", pattern = "things88/{thing}", pattern = "things89/{thing}", pattern = "things90/{thing}", pattern = "things91/{thing}", pattern = "things92/{thing}", pattern = "things93/{thing}", pattern = "things94/{thing}", pattern = "things95/{thing}", pattern = "things96/{thing}", pattern = "things97/{thing}", pattern = "things98/{thing}", pattern = "things99/{thing}", pattern = "things100/{thing}")]
pub struct TooMany {
    pub thing: String,
}

fn main() {}
