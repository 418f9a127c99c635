/*!
# `std::cout<<` expression `<<std::endl;`

## Purpose
Store the expression in register A.

*/
